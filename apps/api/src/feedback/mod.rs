// Feedback Rule Engine
// Classifies each selected personality into a response category and emits a
// canned reaction plus a rating drawn from the category's band.

pub mod effectiveness;
pub mod emotions;
pub mod engine;
pub mod handlers;
pub mod rules;
