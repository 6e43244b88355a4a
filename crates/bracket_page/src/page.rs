use crate::config::PageConfig;
use crate::error::PageError;
use crate::players::{Entrant, build_player_row, gather_entrants, player_input_id};
use dom::{Document, DocumentHost, Id, Node};
use dom_factory::{ElementFactory, Properties};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddPlayer,
    ResetPlayers,
    GenerateBracket,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The player grid changed; `rows` is the new row count.
    Rows { rows: usize },
    Entrants(Vec<Entrant>),
}

/// The sign-up page: a document, the factory that fills it, and the wired button handlers.
pub struct BracketPage {
    config: PageConfig,
    document: Document,
    factory: ElementFactory,
    player_rows: Id,
    /// Players numbered since the last reset.
    player_count: u32,
    handlers: Vec<(String, Command)>,
}

impl BracketPage {
    /// Mount the page skeleton, then run page init (lookup, wiring, initial reset).
    pub fn new(config: PageConfig) -> Result<Self, PageError> {
        let document = Document::new();
        let factory = ElementFactory::new(document.allocator());
        let mut page = Self {
            config,
            document,
            factory,
            player_rows: Id::UNASSIGNED,
            player_count: 0,
            handlers: Vec::new(),
        };
        page.mount_skeleton()?;
        page.init()?;
        Ok(page)
    }

    fn mount_skeleton(&mut self) -> Result<(), PageError> {
        let f = &self.factory;
        let button = |id: &str, label: &str| -> Result<Node, PageError> {
            Ok(f.button(
                &Properties::new().set("id", id).set("type", "button"),
                &["btn"],
                label,
            )?)
        };

        let mut controls = f.div(&Properties::EMPTY, &["controls"], "")?;
        for node in [
            button(&self.config.add_player_button_id, "Add Player")?,
            button(&self.config.reset_players_button_id, "Reset Players")?,
            button(&self.config.generate_bracket_button_id, "Generate Bracket")?,
        ] {
            let _ = controls.append_child(node);
        }

        let rows = f.div(
            &Properties::new().set("id", self.config.player_rows_id.as_str()),
            &["player-rows"],
            "",
        )?;

        let mut main = f.main(&Properties::EMPTY, &["bracket-app"], "")?;
        for node in [f.h1(&Properties::EMPTY, &[], "Tournament Bracket")?, controls, rows] {
            let _ = main.append_child(node);
        }

        let root = self.document.root_id();
        self.document.append_child(root, main)?;
        Ok(())
    }

    fn init(&mut self) -> Result<(), PageError> {
        let rows_id = &self.config.player_rows_id;
        self.player_rows = self
            .document
            .get_element_by_id(rows_id)
            .map(Node::id)
            .ok_or_else(|| PageError::MissingElement(rows_id.clone()))?;

        let wiring = [
            (&self.config.add_player_button_id, Command::AddPlayer),
            (&self.config.reset_players_button_id, Command::ResetPlayers),
            (&self.config.generate_bracket_button_id, Command::GenerateBracket),
        ];
        for (button_id, command) in wiring {
            if self.document.get_element_by_id(button_id).is_none() {
                log::warn!(target: "bracket_page", "button #{button_id} not found; {command:?} stays unwired");
                continue;
            }
            self.handlers.push((button_id.clone(), command));
        }

        self.reset_players()?;
        Ok(())
    }

    /// Dispatch a click on the element with the given `id` attribute.
    pub fn click(&mut self, element_id: &str) -> Result<CommandOutcome, PageError> {
        let command = self
            .handlers
            .iter()
            .find(|(id, _)| id == element_id)
            .map(|(_, command)| *command)
            .ok_or_else(|| PageError::NoHandler(element_id.to_string()))?;
        self.run(command)
    }

    pub fn run(&mut self, command: Command) -> Result<CommandOutcome, PageError> {
        log::debug!(target: "bracket_page", "running {command:?}");
        match command {
            Command::AddPlayer => self.add_player_inputs(1)?,
            Command::ResetPlayers => self.reset_players()?,
            Command::GenerateBracket => {
                return Ok(CommandOutcome::Entrants(self.generate_bracket()));
            }
        }
        Ok(CommandOutcome::Rows { rows: self.rows() })
    }

    /// Append `count` rows in one batch.
    pub fn add_player_inputs(&mut self, count: u32) -> Result<(), PageError> {
        let mut fragment = self.document.create_fragment();
        for _ in 0..count {
            self.player_count += 1;
            let row = build_player_row(
                &self.factory,
                self.player_count,
                self.config.max_name_length,
            )?;
            let _ = fragment.append_child(row);
        }
        self.document.append_child(self.player_rows, fragment)?;
        Ok(())
    }

    /// Empty the grid, restart numbering, and add the default number of rows.
    pub fn reset_players(&mut self) -> Result<(), PageError> {
        self.document.clear_children(self.player_rows)?;
        self.player_count = 0;
        self.add_player_inputs(self.config.default_player_count)
    }

    /// Gather the entrants. Building the bracket itself is not implemented.
    pub fn generate_bracket(&self) -> Vec<Entrant> {
        let entrants = self
            .document
            .node(self.player_rows)
            .map(gather_entrants)
            .unwrap_or_default();
        log::info!(
            target: "bracket_page",
            "gathered {} entrants; bracket generation is not implemented yet",
            entrants.len()
        );
        entrants
    }

    /// Type `name` into player `player`'s input.
    pub fn set_player_name(&mut self, player: u32, name: &str) -> Result<(), PageError> {
        let input = self
            .document
            .get_element_by_id(&player_input_id(player))
            .map(Node::id)
            .ok_or(PageError::NoSuchPlayer(player))?;
        let host = self.document.allocator();
        let node = self
            .document
            .node_mut(input)
            .ok_or(PageError::NoSuchPlayer(player))?;
        node.set_property(&host, "value", &name.into())?;
        Ok(())
    }

    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    pub fn rows(&self) -> usize {
        self.document
            .node(self.player_rows)
            .map(|n| n.children().len())
            .unwrap_or(0)
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn outline(&self, cap: usize) -> Vec<String> {
        self.document.outline(cap)
    }
}
