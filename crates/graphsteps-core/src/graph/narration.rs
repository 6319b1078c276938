//! Structured step narration
//!
//! Every step carries a [`Narration`] describing what the algorithm decided
//! and about which vertices or edges. Turning it into a sentence is left to
//! the presentation layer via [`Narration::render`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::types::{EdgeKey, Vertex};
use crate::error::GraphStepsError;

/// Language used to render narrations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl FromStr for Locale {
    type Err = GraphStepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "pl" => Ok(Locale::Pl),
            other => Err(GraphStepsError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Pl => write!(f, "pl"),
        }
    }
}

/// What happened in a single step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Narration {
    // Search traversal
    TraversalStarted { vertex: Vertex },
    ProcessingVertex { vertex: Vertex },
    VertexDiscovered { from: Vertex, to: Vertex },
    EdgeRejected { from: Vertex, to: Vertex },
    EdgeAlreadyInTree { from: Vertex, to: Vertex },
    VertexClosed { vertex: Vertex },
    TraversalFinished,

    // Spanning trees
    CheckingEdge { from: Vertex, to: Vertex },
    EdgeAccepted { from: Vertex, to: Vertex },
    EdgeClosesCycle { from: Vertex, to: Vertex },

    // Shortest paths
    ShortestPathsInitialized { start: Vertex },
    MinCostVertexSelected { vertex: Vertex },
    RelaxingEdge { from: Vertex, to: Vertex, updated: bool },
    VertexSettled { vertex: Vertex },
    EdgeRelaxed {
        iteration: usize,
        from: Vertex,
        to: Vertex,
        removed: Option<EdgeKey>,
    },
    EdgeUnchanged { iteration: usize, from: Vertex, to: Vertex },
    VertexPassFinished { iteration: usize, vertex: Vertex },
}

impl Narration {
    /// Render the narration as a sentence in the given language
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.render_en(),
            Locale::Pl => self.render_pl(),
        }
    }

    fn render_en(&self) -> String {
        match *self {
            Narration::TraversalStarted { vertex } => {
                format!("Adding start vertex {} to the frontier.", vertex)
            }
            Narration::ProcessingVertex { vertex } => format!("Processing vertex {}.", vertex),
            Narration::VertexDiscovered { from, to } => format!(
                "Adding vertex {} to the frontier. Edge between vertices {} and {} joins the result tree.",
                to, from, to
            ),
            Narration::EdgeRejected { from, to } => format!(
                "Edge between vertices {} and {} is not added to the result tree.",
                from, to
            ),
            Narration::EdgeAlreadyInTree { from, to } => format!(
                "Edge between vertices {} and {} was already visited and added to the result tree.",
                from, to
            ),
            Narration::VertexClosed { vertex } => {
                format!("Vertex {} is fully processed.", vertex)
            }
            Narration::TraversalFinished => "Result of the algorithm.".to_string(),
            Narration::CheckingEdge { from, to } => {
                format!("Checking edge between vertices {} and {}.", from, to)
            }
            Narration::EdgeAccepted { from, to } => format!(
                "Edge between vertices {} and {} does not create a cycle - added to the result tree.",
                from, to
            ),
            Narration::EdgeClosesCycle { from, to } => format!(
                "Edge between vertices {} and {} would create a cycle - not added to the result tree.",
                from, to
            ),
            Narration::ShortestPathsInitialized { start } => format!(
                "Initialization - costs set from the neighbours of start vertex {}.",
                start
            ),
            Narration::MinCostVertexSelected { vertex } => format!(
                "Selecting the cheapest unvisited vertex - vertex {}.",
                vertex
            ),
            Narration::RelaxingEdge { from, to, updated } => {
                let outcome = if updated {
                    "cost updated"
                } else {
                    "no change"
                };
                format!(
                    "Correcting cost using edge between vertices {} and {} ({}).",
                    from, to, outcome
                )
            }
            Narration::VertexSettled { vertex } => format!(
                "All corrections from vertex {} are done - it is now visited.",
                vertex
            ),
            Narration::EdgeRelaxed {
                iteration,
                from,
                to,
                removed,
            } => {
                let mut text = format!("Iteration {}: ", iteration);
                if let Some((old_from, old_to)) = removed {
                    text.push_str(&format!(
                        "removing edge between vertices {} and {} from the result. ",
                        old_from, old_to
                    ));
                }
                text.push_str(&format!(
                    "Adding edge between vertices {} and {} to the result. Updating cost of reaching vertex {}.",
                    from, to, to
                ));
                text
            }
            Narration::EdgeUnchanged {
                iteration,
                from,
                to,
            } => format!(
                "Iteration {}: edge between vertices {} and {} changes nothing.",
                iteration, from, to
            ),
            Narration::VertexPassFinished { iteration, vertex } => format!(
                "Iteration {}: finished processing vertex {}.",
                iteration, vertex
            ),
        }
    }

    fn render_pl(&self) -> String {
        match *self {
            Narration::TraversalStarted { vertex } => {
                format!("Dodanie wierzchołka startowego {} do kolejki.", vertex)
            }
            Narration::ProcessingVertex { vertex } => {
                format!("Przetwarzanie wierzchołka {}.", vertex)
            }
            Narration::VertexDiscovered { from, to } => format!(
                "Dodanie wierzchołka {} do kolejki. Dodanie krawędzi łączącej wierzchołki {} oraz {} do drzewa wynikowego.",
                to, from, to
            ),
            Narration::EdgeRejected { from, to } => format!(
                "Krawędź łącząca wierzchołki {} oraz {} nie zostaje dodana do drzewa wynikowego.",
                from, to
            ),
            Narration::EdgeAlreadyInTree { from, to } => format!(
                "Krawędź łącząca wierzchołki {} oraz {} została już wcześniej odwiedzona i dodana do drzewa wynikowego.",
                from, to
            ),
            Narration::VertexClosed { vertex } => {
                format!("Wierzchołek {} został przetworzony.", vertex)
            }
            Narration::TraversalFinished => "Wynik działania algorytmu.".to_string(),
            Narration::CheckingEdge { from, to } => format!(
                "Sprawdzanie krawędzi łączącej wierzchołki {} oraz {}.",
                from, to
            ),
            Narration::EdgeAccepted { from, to } => format!(
                "Krawędź łącząca wierzchołki {} oraz {} nie utworzy cyklu - zostaje dodana do drzewa wynikowego.",
                from, to
            ),
            Narration::EdgeClosesCycle { from, to } => format!(
                "Krawędź łącząca wierzchołki {} oraz {} spowoduje utworzenie cyklu - nie zostaje dodana do drzewa wynikowego.",
                from, to
            ),
            Narration::ShortestPathsInitialized { start } => format!(
                "Inicjalizacja - ustalenie kosztów na podstawie sąsiadów wierzchołka startowego {}.",
                start
            ),
            Narration::MinCostVertexSelected { vertex } => format!(
                "Wybór najtańszego nieodwiedzonego wierzchołka - wierzchołek {}.",
                vertex
            ),
            Narration::RelaxingEdge { from, to, .. } => format!(
                "Korekta kosztu na podstawie krawędzi łączącej wierzchołki {} oraz {}.",
                from, to
            ),
            Narration::VertexSettled { vertex } => format!(
                "Wszystkie korekty wierzchołka {} zostały dokonane - jest już odwiedzony.",
                vertex
            ),
            Narration::EdgeRelaxed {
                iteration,
                from,
                to,
                removed,
            } => {
                let mut text = format!("Iteracja {}: ", iteration);
                if let Some((old_from, old_to)) = removed {
                    text.push_str(&format!(
                        "usunięcie krawędzi łączącej wierzchołki {} oraz {} z wyniku. ",
                        old_from, old_to
                    ));
                }
                text.push_str(&format!(
                    "Dodanie krawędzi łączącej wierzchołki {} oraz {} do wyniku. Aktualizacja kosztów dotarcia do wierzchołka {}.",
                    from, to, to
                ));
                text
            }
            Narration::EdgeUnchanged {
                iteration,
                from,
                to,
            } => format!(
                "Iteracja {}: krawędź łącząca wierzchołki {} oraz {} nie wnosi żadnych zmian.",
                iteration, from, to
            ),
            Narration::VertexPassFinished { iteration, vertex } => format!(
                "Iteracja {}: zakończenie przetwarzania wierzchołka {}.",
                iteration, vertex
            ),
        }
    }
}
