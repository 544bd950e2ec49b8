pub mod advertisement;
pub mod feedback;
pub mod personality;
