//! Cart Repositories

mod items;
mod memory;

pub(crate) use items::PgCartItemsRepository;
pub(crate) use memory::MemoryCartStore;
