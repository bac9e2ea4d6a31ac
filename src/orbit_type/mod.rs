//! # Orbital element representations
//!
//! - [`classical_element`](crate::orbit_type::classical_element) — Classical elements `(p, e, i, Ω, ω, ν)`,
//!   valid for every conic thanks to the semi-latus rectum.
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) — Epoch-tagged elements `(a, e, i, Ω, ω, M)`
//!   as delivered by ephemeris services.
//! - [`state_vector`](crate::orbit_type::state_vector) — Position / velocity in the perifocal and inertial
//!   frames, and the [`coe_to_state`](crate::orbit_type::state_vector::coe_to_state) conversion.
//!
//! ## Typical workflow
//!
//! ```rust
//! use keplerian_orbit::orbit_type::classical_element::ClassicalElements;
//! use keplerian_orbit::constants::MU_EARTH;
//!
//! let coe = ClassicalElements::new(7000.0, 0.01, 0.9, 0.3, 1.2, 0.0).unwrap();
//! let state = coe.to_state(MU_EARTH).unwrap();
//! println!("r = {}", state.position);
//! ```

/// Classical `(p, e, i, Ω, ω, ν)` elements.
pub mod classical_element;

/// Epoch-tagged `(a, e, i, Ω, ω, M)` elements and their conversion to the classical set.
pub mod keplerian_element;

/// Position / velocity vectors and the element → state conversion.
pub mod state_vector;
