// Word statistics — tokenization, top-K ranking and top-K overlap.

pub mod frequency;
pub mod overlap;
pub mod tokenizer;
