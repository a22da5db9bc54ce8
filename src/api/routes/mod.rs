//! API route declarations (e.g., /api/*)

pub mod district_routes;
