// lexsim: rank pairs of text documents by overlap of their top-K words
//
// This is the library root. Each module corresponds to one stage of the
// pipeline: load the corpus, compute word statistics, compare and rank
// pairs, and report.

pub mod config;
pub mod corpus;
pub mod output;
pub mod pipeline;
pub mod topics;
