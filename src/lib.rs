//! Two-body orbital mechanics: Kepler's equation for every conic, anomaly conversions,
//! classical elements to state vectors and time-of-flight propagation.
//!
//! ```rust
//! use keplerian_orbit::constants::MU_EARTH;
//! use keplerian_orbit::orbit_type::classical_element::ClassicalElements;
//!
//! let coe = ClassicalElements::new(7000.0, 0.05, 0.9, 0.3, 1.2, 0.0).unwrap();
//! let later = coe.propagate(MU_EARTH, 1800.0).unwrap();
//! let state = later.to_state(MU_EARTH).unwrap();
//! assert!(state.position.norm() > 0.0);
//! ```
pub mod anomaly;
pub mod constants;
pub mod ephemeris;
pub mod kepler;
pub mod orbit_errors;
pub mod orbit_type;
pub mod propagation;
pub mod ref_system;
pub mod time;
pub mod trajectory;
