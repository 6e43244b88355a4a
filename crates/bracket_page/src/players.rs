use crate::error::PageError;
use dom::traverse::collect_elements_named;
use dom::{DocumentHost, Node, TreeError};
use dom_factory::{ElementFactory, Properties};

/// One player-name input gathered for bracket generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entrant {
    pub input_id: String,
    /// Trimmed; empty when nothing was typed.
    pub name: String,
}

pub fn player_input_id(player: u32) -> String {
    format!("txt-player-{player}")
}

/// `div.input-group > label[for] + input#txt-player-N`
pub fn build_player_row<H: DocumentHost>(
    factory: &ElementFactory<H>,
    player: u32,
    max_name_length: u32,
) -> Result<Node, PageError> {
    let input_id = player_input_id(player);

    let mut row = factory.div(&Properties::EMPTY, &["input-group"], "")?;
    let label = factory.label(
        &Properties::new().set("for", &input_id),
        &[],
        &format!("Player {player}"),
    )?;
    let input = factory.input(
        &Properties::new()
            .set("id", &input_id)
            .set("type", "text")
            .set("maxLength", max_name_length),
        &[],
        "",
    )?;

    let row_id = row.id();
    for child in [label, input] {
        row.append_child(child)
            .map_err(|_| TreeError::NotAContainer(row_id))?;
    }
    Ok(row)
}

/// Every `input` under `container`, in document order, as entrants.
pub fn gather_entrants(container: &Node) -> Vec<Entrant> {
    let mut inputs = Vec::new();
    collect_elements_named(container, "input", &mut inputs);
    inputs
        .into_iter()
        .map(|input| Entrant {
            input_id: input.attr("id").unwrap_or_default().to_string(),
            name: input
                .property("value")
                .map(|v| v.to_attr_string().trim().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::NodeAllocator;

    #[test]
    fn row_has_label_and_bounded_text_input() {
        let factory = ElementFactory::new(NodeAllocator::new());
        let row = build_player_row(&factory, 3, 20).unwrap();

        assert_eq!(row.class_list(), vec!["input-group"]);
        let [label, input] = row.children() else {
            panic!("expected label + input");
        };
        assert!(label.is_element_named("label"));
        assert_eq!(label.attr("for"), Some("txt-player-3"));
        assert_eq!(label.text_content(), "Player 3");
        assert!(input.is_element_named("input"));
        assert_eq!(input.attr("id"), Some("txt-player-3"));
        assert_eq!(input.attr("type"), Some("text"));
        assert_eq!(input.attr("maxlength"), Some("20"));
    }

    #[test]
    fn gathers_names_in_row_order() {
        let host = NodeAllocator::new();
        let factory = ElementFactory::new(host.clone());
        let mut container = host.create_element("div");
        for n in 1..=2 {
            container
                .append_child(build_player_row(&factory, n, 20).unwrap())
                .unwrap();
        }
        let first = &mut container.children_mut().unwrap()[0].children_mut().unwrap()[1];
        first.set_property(&host, "value", &"  Ada ".into()).unwrap();

        assert_eq!(
            gather_entrants(&container),
            vec![
                Entrant {
                    input_id: "txt-player-1".into(),
                    name: "Ada".into()
                },
                Entrant {
                    input_id: "txt-player-2".into(),
                    name: String::new()
                },
            ]
        );
    }
}
