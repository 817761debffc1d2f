pub mod buffer_type;
pub mod group;
pub mod record;

pub use buffer_type::BufferType;
pub use group::GroupFilter;
pub use record::Record;
