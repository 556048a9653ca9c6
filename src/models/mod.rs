pub mod city;
pub mod hotel;
pub mod itinerary;
pub mod place;
pub mod saved;
