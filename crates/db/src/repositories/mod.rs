pub mod banner_repo;
pub mod contact_repo;
pub mod gallery_repo;
pub mod price_repo;
pub mod service_repo;
pub mod testimonial_repo;

pub use banner_repo::BannerRepo;
pub use contact_repo::ContactRepo;
pub use gallery_repo::GalleryRepo;
pub use price_repo::PriceRepo;
pub use service_repo::ServiceRepo;
pub use testimonial_repo::TestimonialRepo;
