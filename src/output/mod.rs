mod writer;

pub use writer::SpriteWriter;
