pub mod district_dto;
