use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft_store::FormDraftStore;
use crate::errors::{AppError, AppResult};
use crate::geo::session::MapSession;
use crate::geo::{GeoPoint, GeocodeStatus, Geocoder, ProvidedGeocoder};
use crate::storage::sqlite::SqliteStore;
use crate::ui::messages::{confirm, info, success};

/// The map-picker flow: the picked point becomes a shareable link, the
/// reverse geocoder fills the address, and the link is copied into the
/// draft only after an explicit confirmation.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Map {
        lat,
        lon,
        address,
        yes,
    } = cmd
    {
        let point = GeoPoint::parse(lat, lon)?;
        let map_link = point.map_link();

        let mut session = MapSession::new();
        let token = session.begin();

        let geocoder = ProvidedGeocoder {
            address: address.clone(),
        };
        let result = geocoder.reverse(&point);

        // A lookup that outlived its interaction must not touch the draft.
        if !session.is_current(token) {
            info("Lookup superseded; nothing changed.");
            return Ok(());
        }

        let formatted = match result.formatted_address {
            Some(addr) if result.status == GeocodeStatus::Ok => addr,
            _ => {
                return Err(AppError::Geocode(format!(
                    "no address found for {}, {}",
                    point.lat, point.lon
                )));
            }
        };

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut draft = FormDraftStore::load(&store)?;

        draft.address = formatted.clone();
        info(format!("Address: {}", formatted));

        if *yes || confirm(&format!("Copy this location's link into the draft?\n  {}", map_link)) {
            draft.map_link = map_link;
            success("Map link copied into the draft.");
        } else {
            info("Link not copied; address kept.");
        }

        FormDraftStore::save(&mut store, &draft)?;
    }
    Ok(())
}
