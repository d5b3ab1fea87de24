// src/gui/components/mod.rs
pub mod cards;
pub mod export_bar;
pub mod table;
pub mod tabs;
