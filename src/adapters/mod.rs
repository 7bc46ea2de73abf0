// Adapters layer: concrete implementations for external systems (http transport, score storage).

pub mod http;
pub mod memory_store;
