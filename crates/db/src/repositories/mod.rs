mod car_repo;
mod content_repo;
mod request_repo;
mod reservation_repo;
mod user_repo;

pub use car_repo::CarRepo;
pub use content_repo::{
    AboutSectionRepo, AnnouncementRepo, CoreValueRepo, EventRepo, HeroBannerRepo, MediaItemRepo,
};
pub use request_repo::RequestRepo;
pub use reservation_repo::ReservationRepo;
pub use user_repo::UserRepo;
