mod catalog;
mod common;
mod scoring;
mod service;
