pub mod parameters;
pub mod samples;
pub mod statistics;
pub mod visits;
