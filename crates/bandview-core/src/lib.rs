pub mod composite;
pub mod config;
pub mod consts;
pub mod controls;
pub mod display;
pub mod error;
pub mod input;
pub mod io;
pub mod raster;
pub mod selection;
pub mod surface;
pub mod view;
pub mod viewer;
