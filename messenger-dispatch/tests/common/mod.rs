#![allow(dead_code)] // not every test crate uses every mock helper

pub mod mock_platform;
