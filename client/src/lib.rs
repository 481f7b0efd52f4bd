pub mod canvas;
pub mod controls;
pub mod run;
