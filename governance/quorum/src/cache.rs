//! Caller owned cache of registrar data

use std::collections::HashMap;

use solana_program::pubkey::Pubkey;

use crate::state::registrar::Registrar;

/// Registrars keyed by their account address
///
/// The cache is an explicit value owned by the caller. An entry stays valid only as long
/// as the registrar account data doesn't change, refresh() replaces it when it does.
#[derive(Clone, Debug, Default)]
pub struct RegistrarCache {
    registrars: HashMap<Pubkey, Registrar>,
}

impl RegistrarCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached registrar
    pub fn get(&self, registrar_address: &Pubkey) -> Option<&Registrar> {
        self.registrars.get(registrar_address)
    }

    /// Returns the cached registrar or loads and caches it
    /// A failed load leaves the cache unchanged
    pub fn get_or_load<E, F>(
        &mut self,
        registrar_address: &Pubkey,
        load: F,
    ) -> Result<&Registrar, E>
    where
        F: FnOnce() -> Result<Registrar, E>,
    {
        if !self.registrars.contains_key(registrar_address) {
            let registrar = load()?;
            self.registrars.insert(*registrar_address, registrar);
        }

        // The entry was either present or just inserted
        Ok(&self.registrars[registrar_address])
    }

    /// Stores the latest registrar account data
    /// Returns true if the cached entry was missing or stale
    pub fn refresh(&mut self, registrar_address: &Pubkey, registrar: Registrar) -> bool {
        if self.registrars.get(registrar_address) == Some(&registrar) {
            return false;
        }

        self.registrars.insert(*registrar_address, registrar);
        true
    }

    /// Returns the digit shift for the mint from the cached registrar, 0 when not cached
    pub fn get_digit_shift(&self, registrar_address: &Pubkey, mint: &Pubkey) -> i8 {
        self.get(registrar_address)
            .map(|registrar| registrar.digit_shift_for_mint(mint))
            .unwrap_or(0)
    }

    /// Drops the cached registrar, returns true if it was cached
    pub fn invalidate(&mut self, registrar_address: &Pubkey) -> bool {
        self.registrars.remove(registrar_address).is_some()
    }

    /// Drops all cached registrars
    pub fn clear(&mut self) {
        self.registrars.clear();
    }

    /// Number of cached registrars
    pub fn len(&self) -> usize {
        self.registrars.len()
    }

    /// Returns true if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.registrars.is_empty()
    }
}
