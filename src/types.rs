pub mod feature;
pub mod map;
pub mod nominatim;
pub mod person;
