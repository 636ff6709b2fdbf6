//! Page bootstrap: floor list and `?room=` deep links

use tracing::{debug, info};
use vyas_core::validation::parse_room_param;
use vyas_core::{Floor, LayoutRules, PageConfig, Room};
use vyas_net::FacilityApi;

use crate::error::{Error, Result};

/// Floors offered by the selector, in server order
pub async fn load_floors(api: &dyn FacilityApi, config: &PageConfig) -> Result<Vec<Floor>> {
    let building_id = config.building_id.ok_or(Error::MissingBuilding)?;
    let response = api.floors_in_building(building_id).await?;
    if !response.success {
        return Err(Error::FloorsUnavailable(building_id));
    }

    debug!(building_id, floors = response.floors.len(), "Floors loaded");
    Ok(response.floors)
}

/// Look up a deep-linked room code such as `vy-404`
pub async fn resolve_room_link(
    api: &dyn FacilityApi,
    raw: &str,
    rules: &LayoutRules,
) -> Result<Room> {
    let code = parse_room_param(raw, &rules.room_prefix)
        .ok_or_else(|| Error::InvalidRoomCode(raw.to_string()))?;

    let response = api.room_by_number(&code).await?;
    match response.room {
        Some(room) if response.success => {
            info!(room = %room.number, room_id = room.id, "Resolved room link");
            Ok(room)
        }
        _ => Err(Error::RoomNotFound(code)),
    }
}

/// Preselect the floor and room of a resolved deep link
pub fn apply_room_link(config: &mut PageConfig, room: &Room) {
    if let Some(floor_id) = room.floor_id {
        config.preselected_floor = Some(floor_id);
    }
    config.preselected_room = Some(room.id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;
    use vyas_core::RoomCategory;

    fn api() -> MockApi {
        let mut room = Room::new(44, "VY404", RoomCategory::Laboratory);
        room.floor_id = Some(4);
        MockApi::new().with_floor(4, vec![room])
    }

    #[tokio::test]
    async fn test_load_floors_needs_building() {
        let api = api();
        let result = load_floors(&api, &PageConfig::default()).await;
        assert!(matches!(result, Err(Error::MissingBuilding)));

        let config = PageConfig {
            building_id: Some(1),
            ..PageConfig::default()
        };
        let floors = load_floors(&api, &config).await.unwrap();
        assert_eq!(floors.len(), 1);
    }

    #[tokio::test]
    async fn test_resolve_room_link() {
        let api = api();
        let rules = LayoutRules::default();

        let room = resolve_room_link(&api, " vy-404 ", &rules).await.unwrap();
        assert_eq!(room.id, 44);

        let mut config = PageConfig::default();
        apply_room_link(&mut config, &room);
        assert_eq!(config.preselected_floor, Some(4));
        assert_eq!(config.preselected_room, Some(44));
    }

    #[tokio::test]
    async fn test_resolve_room_link_rejects_bad_codes() {
        let api = api();
        let rules = LayoutRules::default();

        assert!(matches!(
            resolve_room_link(&api, "404", &rules).await,
            Err(Error::InvalidRoomCode(_))
        ));
        assert!(matches!(
            resolve_room_link(&api, "VY999", &rules).await,
            Err(Error::RoomNotFound(code)) if code == "VY999"
        ));
    }
}
