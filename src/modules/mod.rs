pub mod beers;

use taproom_kernel::ModuleRegistry;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry) {
    registry.register(beers::create_module(beers::repository::in_memory()));
}
