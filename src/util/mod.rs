pub mod cn;
pub mod date;

pub use cn::{provide_class_merger, use_class_merger, ClassMerger, Dedup, MergeStrategy, TailwindMerge};
