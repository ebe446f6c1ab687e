pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed constants of the dashboard,
    //! organized by functional area.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between background tasks and the UI
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // REFRESH CONFIGURATION
    // =============================================================================

    /// Dashboard refresh configuration
    pub mod refresh {
        use std::time::Duration;

        /// Period of the refresh timer (milliseconds). Not configurable at runtime.
        pub const REFRESH_INTERVAL_MS: u64 = 300_000; // 5 minutes

        /// Helper function to get the refresh period
        pub const fn refresh_interval() -> Duration {
            Duration::from_millis(REFRESH_INTERVAL_MS)
        }
    }

    // =============================================================================
    // WORKBOOK CONFIGURATION
    // =============================================================================

    /// Default field names recognized in the workbook header row
    pub mod columns {
        /// Technique name column
        pub const TECHNIQUE: &str = "Nombre_de_la_t_cnica_en_espa_ol";
        /// State column
        pub const STATE: &str = "Estado";
        /// Municipality column
        pub const MUNICIPALITY: &str = "Municipio";
    }

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Slot text shown while a load is pending.
    pub const LOADING_TEXT: &str = "Cargando...";

    /// Slot text shown when a load failed.
    pub const ERROR_TEXT: &str = "Error";

    /// Splash screen duration (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2_000;
}
