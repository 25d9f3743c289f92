use crate::content::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Keys the palette reacts to, already decoded from a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKey {
    Toggle,
    Escape,
    Up,
    Down,
    Enter,
    Other,
}

impl PaletteKey {
    pub fn from_parts(key: &str, meta: bool, ctrl: bool) -> Self {
        match key {
            "k" | "K" if meta || ctrl => PaletteKey::Toggle,
            "Escape" => PaletteKey::Escape,
            "ArrowUp" => PaletteKey::Up,
            "ArrowDown" => PaletteKey::Down,
            "Enter" => PaletteKey::Enter,
            _ => PaletteKey::Other,
        }
    }
}

/// What the keyboard handler should do after a key went through the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub prevent_default: bool,
    /// Section id to scroll to.
    pub navigate: Option<&'static str>,
}

/// Commands whose label or keywords contain `query`, ignoring case, in list order.
pub fn filter<'a>(query: &str, commands: &'a [Command]) -> Vec<&'a Command> {
    let query = query.to_lowercase();
    commands
        .iter()
        .filter(|c| {
            c.label.to_lowercase().contains(&query) || c.keywords.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn move_selection(direction: Direction, current: usize, count: usize) -> usize {
    if count == 0 {
        return current;
    }
    match direction {
        Direction::Next => (current + 1) % count,
        Direction::Prev => (current % count + count - 1) % count,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandPalette {
    open: bool,
    query: String,
    selected: usize,
}

impl CommandPalette {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.selected = 0;
    }

    pub fn results<'a>(&self, commands: &'a [Command]) -> Vec<&'a Command> {
        filter(&self.query, commands)
    }

    pub fn move_selection(&mut self, direction: Direction, commands: &[Command]) {
        let count = self.results(commands).len();
        self.selected = move_selection(direction, self.selected, count);
    }

    /// Runs the command at `index` of the current results: closes the palette and
    /// clears the query. Out of range does nothing.
    pub fn commit(&mut self, index: usize, commands: &[Command]) -> Option<&'static str> {
        let action = self.results(commands).get(index).map(|c| c.action)?;
        self.open = false;
        self.set_query("");
        Some(action)
    }

    /// Whether `key` can change a palette that is (or isn't) `open`. Keys that
    /// can't are left alone so the page keeps typing without touching palette state.
    pub fn reacts_to(open: bool, key: PaletteKey) -> bool {
        match key {
            PaletteKey::Toggle => true,
            PaletteKey::Other => false,
            _ => open,
        }
    }

    pub fn handle_key(&mut self, key: PaletteKey, commands: &[Command]) -> KeyOutcome {
        if key == PaletteKey::Toggle {
            self.toggle();
            return KeyOutcome {
                prevent_default: true,
                navigate: None,
            };
        }
        if !self.open {
            return KeyOutcome::default();
        }
        match key {
            PaletteKey::Escape => {
                self.close();
                KeyOutcome::default()
            }
            PaletteKey::Down | PaletteKey::Up => {
                let direction = if key == PaletteKey::Down {
                    Direction::Next
                } else {
                    Direction::Prev
                };
                self.move_selection(direction, commands);
                KeyOutcome {
                    prevent_default: true,
                    navigate: None,
                }
            }
            PaletteKey::Enter => KeyOutcome {
                prevent_default: true,
                navigate: self.commit(self.selected, commands),
            },
            PaletteKey::Toggle | PaletteKey::Other => KeyOutcome::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::COMMANDS;

    fn labels(cmds: &[&Command]) -> Vec<&'static str> {
        cmds.iter().map(|c| c.label).collect()
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let all = filter("", COMMANDS);
        assert_eq!(all.len(), COMMANDS.len());
        assert_eq!(labels(&all), COMMANDS.iter().map(|c| c.label).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_matches_label_or_keywords() {
        assert_eq!(labels(&filter("VIEW", COMMANDS)), vec!["View Skills", "View Experience"]);
        assert_eq!(labels(&filter("portfolio", COMMANDS)), vec!["Browse Projects"]);
        // "timeline" matches too
        assert_eq!(
            labels(&filter("me", COMMANDS)),
            vec!["Go to About", "View Experience", "Contact Me"]
        );
        assert!(filter("zzz", COMMANDS).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for query in ["", "e", "stack", "CONTACT", "nothing"] {
            let once = filter(query, COMMANDS).into_iter().copied().collect::<Vec<_>>();
            let twice = filter(query, &once).into_iter().copied().collect::<Vec<_>>();
            assert_eq!(once, twice, "query {query:?}");
        }
    }

    #[test]
    fn test_move_selection_wraps() {
        assert_eq!(move_selection(Direction::Next, 0, 3), 1);
        assert_eq!(move_selection(Direction::Next, 2, 3), 0);
        assert_eq!(move_selection(Direction::Prev, 0, 3), 2);
        assert_eq!(move_selection(Direction::Prev, 2, 3), 1);
        assert_eq!(move_selection(Direction::Prev, 0, 1), 0);
    }

    #[test]
    fn test_move_selection_empty_is_noop() {
        assert_eq!(move_selection(Direction::Next, 0, 0), 0);
        assert_eq!(move_selection(Direction::Prev, 4, 0), 4);

        let mut palette = CommandPalette::default();
        palette.open();
        palette.set_query("no such command");
        palette.handle_key(PaletteKey::Down, COMMANDS);
        palette.handle_key(PaletteKey::Up, COMMANDS);
        assert_eq!(palette.selected(), 0);
        assert_eq!(palette.handle_key(PaletteKey::Enter, COMMANDS).navigate, None);
        assert!(palette.is_open());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(PaletteKey::from_parts("k", true, false), PaletteKey::Toggle);
        assert_eq!(PaletteKey::from_parts("k", false, true), PaletteKey::Toggle);
        assert_eq!(PaletteKey::from_parts("k", false, false), PaletteKey::Other);
        assert_eq!(PaletteKey::from_parts("Escape", false, false), PaletteKey::Escape);
        assert_eq!(PaletteKey::from_parts("ArrowDown", false, false), PaletteKey::Down);
        assert_eq!(PaletteKey::from_parts("Enter", false, false), PaletteKey::Enter);
    }

    #[test]
    fn test_closed_palette_ignores_keys() {
        let mut palette = CommandPalette::default();
        for key in [PaletteKey::Down, PaletteKey::Enter, PaletteKey::Escape] {
            assert_eq!(palette.handle_key(key, COMMANDS), KeyOutcome::default());
        }
        assert_eq!(palette, CommandPalette::default());
    }

    #[test]
    fn test_only_relevant_keys_reach_the_palette() {
        let keys = [
            PaletteKey::Toggle,
            PaletteKey::Escape,
            PaletteKey::Up,
            PaletteKey::Down,
            PaletteKey::Enter,
            PaletteKey::Other,
        ];
        let closed = keys
            .into_iter()
            .filter(|k| CommandPalette::reacts_to(false, *k))
            .collect::<Vec<_>>();
        assert_eq!(closed, vec![PaletteKey::Toggle]);
        assert!(!CommandPalette::reacts_to(true, PaletteKey::Other));
        assert!(CommandPalette::reacts_to(true, PaletteKey::Enter));

        // skipped keys really are no-ops for the state machine
        for open in [false, true] {
            for key in keys.into_iter().filter(|k| !CommandPalette::reacts_to(open, *k)) {
                let mut palette = CommandPalette::default();
                if open {
                    palette.open();
                }
                let before = palette.clone();
                assert_eq!(palette.handle_key(key, COMMANDS), KeyOutcome::default());
                assert_eq!(palette, before);
            }
        }
    }

    #[test]
    fn test_toggle_escape_lifecycle() {
        let mut palette = CommandPalette::default();
        assert!(palette.handle_key(PaletteKey::Toggle, COMMANDS).prevent_default);
        assert!(palette.is_open());
        palette.handle_key(PaletteKey::Toggle, COMMANDS);
        assert!(!palette.is_open());

        palette.handle_key(PaletteKey::Toggle, COMMANDS);
        palette.set_query("proj");
        palette.handle_key(PaletteKey::Escape, COMMANDS);
        assert!(!palette.is_open());
        // escape keeps what was typed
        assert_eq!(palette.query(), "proj");
    }

    #[test]
    fn test_navigate_and_commit() {
        let mut palette = CommandPalette::default();
        palette.handle_key(PaletteKey::Toggle, COMMANDS);
        palette.handle_key(PaletteKey::Down, COMMANDS);
        palette.handle_key(PaletteKey::Down, COMMANDS);
        assert_eq!(palette.selected(), 2);
        palette.handle_key(PaletteKey::Up, COMMANDS);
        palette.handle_key(PaletteKey::Up, COMMANDS);
        palette.handle_key(PaletteKey::Up, COMMANDS);
        assert_eq!(palette.selected(), COMMANDS.len() - 1);

        let outcome = palette.handle_key(PaletteKey::Enter, COMMANDS);
        assert_eq!(outcome.navigate, Some("contact"));
        assert!(!palette.is_open());
        assert_eq!(palette.query(), "");
    }

    #[test]
    fn test_query_change_resets_selection() {
        let mut palette = CommandPalette::default();
        palette.open();
        palette.move_selection(Direction::Next, COMMANDS);
        assert_eq!(palette.selected(), 1);
        palette.set_query("exp");
        assert_eq!(palette.selected(), 0);
        assert_eq!(palette.commit(0, COMMANDS), Some("experience"));
        assert_eq!(palette.commit(COMMANDS.len(), COMMANDS), None);
    }
}
