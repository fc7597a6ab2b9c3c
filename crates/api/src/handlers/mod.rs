pub mod banner;
pub mod contact;
pub mod gallery;
pub mod price;
pub mod service;
pub mod testimonial;
pub mod upload;
