pub mod district;
