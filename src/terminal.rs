use std::{cell::RefCell, rc::Rc, str::FromStr};

use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use happy_core::{
    entities::OrphanageId,
    gateways::{Navigator, OrphanageGateway},
    navigation::Destination,
    FetchOutcome, MapScreen, MapView,
};

const HELP: &str = "\
Commands:
  refresh     fetch the orphanages again
  open <id>   press the callout of an orphanage
  create      press the create button
  help        show this help
  quit        leave";

/// Prints the requested destinations since there are
/// no other screens in the terminal.
#[derive(Debug, Default)]
pub struct ConsoleNavigator {
    last: RefCell<Option<Destination>>,
}

impl ConsoleNavigator {
    pub fn take_last(&self) -> Option<Destination> {
        self.last.borrow_mut().take()
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, destination: Destination) {
        *self.last.borrow_mut() = Some(destination);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Open(OrphanageId),
    Create,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let cmd = match (words.next(), words.next()) {
            (Some("refresh" | "r"), None) => Self::Refresh,
            (Some("open" | "o"), Some(id)) => {
                let id = id.parse().map_err(|_| format!("Invalid orphanage id: {id}"))?;
                Self::Open(id)
            }
            (Some("create" | "c"), None) => Self::Create,
            (Some("help" | "h" | "?"), None) => Self::Help,
            (Some("quit" | "q" | "exit"), None) => Self::Quit,
            _ => return Err(format!("Unknown command: {}", s.trim())),
        };
        if words.next().is_some() {
            return Err(format!("Unknown command: {}", s.trim()));
        }
        Ok(cmd)
    }
}

#[must_use]
pub fn render(view: &MapView) -> String {
    let MapView {
        region,
        markers,
        footer,
        error,
        loading,
    } = view;
    let mut lines = vec![format!(
        "Map around {} ({}° x {}°)",
        region.center, region.lat_delta, region.lng_delta
    )];
    lines.extend(markers.iter().map(|marker| {
        let hint = if region.contains(&marker.position) {
            ""
        } else {
            " (outside of the initial view)"
        };
        format!(
            "  [{}] {} at {}{hint}",
            marker.key, marker.callout.text, marker.position
        )
    }));
    if *loading {
        lines.push("  loading ...".to_string());
    }
    if let Some(error) = error {
        lines.push(format!("! {error}"));
    }
    lines.push(format!("{}  [+]", footer.label));
    lines.join("\n")
}

/// Fetch the orphanages once and print the map.
pub async fn show<G>(screen: &MapScreen<G, Rc<ConsoleNavigator>>) -> Result<()>
where
    G: OrphanageGateway,
{
    screen.mount();
    let outcome = screen.focus().await;
    println!("{}", render(&screen.render()));
    screen.unmount();
    if let FetchOutcome::Failed(err) = outcome {
        return Err(err.into());
    }
    Ok(())
}

/// Interactive session on stdin.
///
/// Leaving the map for another screen blurs it and coming
/// back focuses it again, just like in the app.
pub async fn browse<G>(
    screen: &MapScreen<G, Rc<ConsoleNavigator>>,
    navigator: &ConsoleNavigator,
) -> Result<()>
where
    G: OrphanageGateway,
{
    screen.mount();
    screen.focus().await;
    println!("{}", render(&screen.render()));
    println!("Type `help` for a list of commands.");

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let cmd = match line.parse::<Command>() {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        match cmd {
            Command::Refresh => {
                screen.focus().await;
            }
            Command::Open(id) => {
                let view = screen.render();
                let Some(marker) = view.markers.iter().find(|m| m.key == id) else {
                    println!("There is no orphanage with id {id} on the map");
                    continue;
                };
                screen.press(marker.callout.on_press);
                leave_and_return(screen, navigator).await;
            }
            Command::Create => {
                screen.press(screen.render().footer.on_create);
                leave_and_return(screen, navigator).await;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }
        println!("{}", render(&screen.render()));
    }
    screen.unmount();
    Ok(())
}

async fn leave_and_return<G>(
    screen: &MapScreen<G, Rc<ConsoleNavigator>>,
    navigator: &ConsoleNavigator,
) where
    G: OrphanageGateway,
{
    let Some(destination) = navigator.take_last() else {
        return;
    };
    screen.blur();
    println!("-> {destination} (not available in the terminal, going back)");
    screen.focus().await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use happy_core::{
        entities::{MapPoint, MapRegion},
        CalloutView, FooterView, MarkerView, CALLOUT_ANCHOR, INITIAL_REGION, MARKER_ICON,
    };

    fn marker(id: i64, name: &str, lat: f64, lng: f64) -> MarkerView {
        MarkerView {
            key: id.into(),
            position: MapPoint::from_lat_lng_deg_unchecked(lat, lng),
            icon: MARKER_ICON,
            callout_anchor: CALLOUT_ANCHOR,
            callout: CalloutView {
                text: name.into(),
                on_press: Destination::OrphanageDetails { id: id.into() },
            },
        }
    }

    fn view(markers: Vec<MarkerView>, error: Option<String>) -> MapView {
        let count = markers.len();
        MapView {
            region: MapRegion {
                center: MapPoint::from_lat_lng_deg_unchecked(-23.94, -46.37),
                ..INITIAL_REGION
            },
            markers,
            footer: FooterView {
                count,
                label: happy_core::footer_label(count),
                on_create: Destination::SelectMapPosition,
            },
            error,
            loading: false,
        }
    }

    #[test]
    fn render_single_orphanage() {
        let out = render(&view(vec![marker(1, "Lar Feliz", -23.94, -46.37)], None));
        assert_eq!(
            "Map around (-23.94, -46.37) (0.008° x 0.008°)\n  [1] Lar Feliz at (-23.94, -46.37)\n1 orfanatos encontrados!  [+]",
            out
        );
    }

    #[test]
    fn render_empty_map() {
        let out = render(&view(vec![], None));
        assert!(out.ends_with("\n0 orfanatos encontrados!  [+]"));
    }

    #[test]
    fn render_error_and_far_away_markers() {
        let out = render(&view(
            vec![marker(2, "Casa Azul", -3.73, -38.52)],
            Some("Unable to fetch orphanages: offline".into()),
        ));
        assert!(out.contains("[2] Casa Azul at (-3.73, -38.52) (outside of the initial view)"));
        assert!(out.contains("! Unable to fetch orphanages: offline"));
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Ok(Command::Refresh), "refresh".parse());
        assert_eq!(Ok(Command::Open(3.into())), " open 3 ".parse());
        assert_eq!(Ok(Command::Create), "c".parse());
        assert_eq!(Ok(Command::Help), "?".parse());
        assert_eq!(Ok(Command::Quit), "quit".parse());
        assert!("open".parse::<Command>().is_err());
        assert!("open x".parse::<Command>().is_err());
        assert!("create 1".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }

    #[test]
    fn remember_last_destination() {
        let navigator = ConsoleNavigator::default();
        navigator.navigate(Destination::SelectMapPosition);
        assert_eq!(Some(Destination::SelectMapPosition), navigator.take_last());
        assert_eq!(None, navigator.take_last());
    }
}
