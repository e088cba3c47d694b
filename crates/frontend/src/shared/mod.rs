pub mod api_utils;
pub mod async_callback;
pub mod clipboard;
pub mod components;
pub mod export;
pub mod icons;
pub mod keyboard;
pub mod layouts;
pub mod modal;
pub mod schemas;
pub mod storage;
pub mod theme;
