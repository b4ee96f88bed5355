pub mod availability;
pub mod calendar;
pub mod hotel;
pub mod vacancy;
