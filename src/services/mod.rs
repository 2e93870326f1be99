// Monarch services
// Stateless helpers that are not tied to a persistent store.

pub mod theme_loader;
