pub mod media;
pub mod uid;
