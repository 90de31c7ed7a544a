pub mod gallery;
pub mod nav;
pub mod testimonial;
