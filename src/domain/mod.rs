pub mod brand;
pub mod calendar;
pub mod contact;
pub mod email;
pub mod name;
pub mod phone;
pub mod quote;
pub mod recipient;
pub mod resume;
pub mod service;
pub mod survey;
pub mod talent;
pub mod validation;
