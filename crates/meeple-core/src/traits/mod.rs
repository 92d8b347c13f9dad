mod search;

pub use search::IVectorSearch;
