pub mod district_service;
