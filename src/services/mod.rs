pub mod naming;
pub mod palette_service;

pub use naming::{
    enrich_color, enrich_palette, namer_from_config, ColorName, ColorNamer, ColorPizzaClient,
    DisabledNamer, Enriched, Enrichment, NamingError,
};
pub use palette_service::{
    ColorOutcome, PaletteOutcome, PaletteRequest, PaletteService, ServiceError, MAX_PALETTE_COLORS,
};
