//! Screen render functions
//!
//! Each screen is a plain function taking the UI, the store, and any
//! screen-local state, and returning the actions the user triggered.
//! The app applies the actions afterwards so store mutations happen in
//! one place.

pub mod history;
pub mod home;
pub mod routine_editor;
pub mod routines;
pub mod workout;

pub use history::show_history;
pub use home::show_home;
pub use routine_editor::{show_routine_editor, RoutineEditorState};
pub use routines::{show_routines, RoutinesState};
pub use workout::{show_workout, WorkoutScreenState};
