pub mod a001_meal_marking;
pub mod a002_welfare_check;
pub mod a003_incident;
pub mod a004_service_user;
pub mod a005_removal_request;
pub mod a006_basket;
pub mod a007_room;
pub mod common;
