use crate::models::Profile;

/// Session-wide profile state: the known profiles and the one currently
/// selected. Passed by reference to whatever needs it; initialized from a
/// profile fetch at startup, mutated only after the store confirmed the
/// matching remote operation.
#[derive(Debug, Default)]
pub struct ProfileContext {
    profiles: Vec<Profile>,
    selected: Option<Profile>,
}

impl ProfileContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn set_profiles(&mut self, profiles: Vec<Profile>) {
        self.profiles = profiles;
    }

    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    pub fn select(&mut self, profile_id: i64) -> bool {
        match self.profiles.iter().find(|p| p.id == profile_id) {
            Some(profile) => {
                self.selected = Some(profile.clone());
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> Option<&Profile> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(|p| p.id)
    }

    pub fn logout(&mut self) {
        self.selected = None;
    }

    /// Remove a profile from the known list; if it was the selected one, the
    /// selection is cleared as well, forcing re-selection.
    pub fn remove_profile(&mut self, profile_id: i64) {
        self.profiles.retain(|p| p.id != profile_id);
        if self.selected_id() == Some(profile_id) {
            self.logout();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: i64, name: &str) -> Profile {
        Profile {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn select_finds_profile_by_id() {
        let mut ctx = ProfileContext::new();
        ctx.set_profiles(vec![profile(1, "Mina"), profile(2, "Joon")]);

        assert!(ctx.select(2));
        assert_eq!(ctx.selected().map(|p| p.name.as_str()), Some("Joon"));
        assert!(!ctx.select(99));
        // Failed select leaves the previous selection alone.
        assert_eq!(ctx.selected_id(), Some(2));
    }

    #[test]
    fn add_profile_appends() {
        let mut ctx = ProfileContext::new();
        ctx.add_profile(profile(1, "Mina"));
        ctx.add_profile(profile(2, "Joon"));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.profiles()[1].name, "Joon");
    }

    #[test]
    fn logout_clears_selection_only() {
        let mut ctx = ProfileContext::new();
        ctx.set_profiles(vec![profile(1, "Mina")]);
        ctx.select(1);
        ctx.logout();
        assert!(ctx.selected().is_none());
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn removing_the_selected_profile_forces_reselection() {
        let mut ctx = ProfileContext::new();
        ctx.set_profiles(vec![profile(1, "Mina"), profile(2, "Joon")]);
        ctx.select(1);

        ctx.remove_profile(1);
        assert!(ctx.selected().is_none());
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.profiles()[0].id, 2);
    }

    #[test]
    fn removing_another_profile_keeps_selection() {
        let mut ctx = ProfileContext::new();
        ctx.set_profiles(vec![profile(1, "Mina"), profile(2, "Joon")]);
        ctx.select(1);

        ctx.remove_profile(2);
        assert_eq!(ctx.selected_id(), Some(1));
        assert_eq!(ctx.len(), 1);
    }
}
