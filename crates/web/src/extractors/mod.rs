pub mod viewer_extractor;
