//! The simplified road map of part of Romania, the classic route-finding
//! example: twenty cities and twenty-three two-way roads.
//!
//! City positions derive from each city's traditional straight-line distance
//! and rough compass bearing to Bucharest, which sits at the origin. The
//! straight-line estimate toward Bucharest therefore reproduces the textbook
//! table exactly and never overestimates the true driving cost. Toward other
//! goals the estimate is only nearly admissible: two roads (Fagaras-Sibiu
//! and Iasi-Neamt) are shorter than the straight line between their plotted
//! endpoints, so an estimate toward such a neighbor can slightly exceed the
//! road distance.

use std::sync::LazyLock;

use crate::map::RoadMap;

// --- city names ---

pub const ARAD: &str = "Arad";
pub const BUCHAREST: &str = "Bucharest";
pub const CRAIOVA: &str = "Craiova";
pub const DOBRETA: &str = "Dobreta";
pub const EFORIE: &str = "Eforie";
pub const FAGARAS: &str = "Fagaras";
pub const GIURGIU: &str = "Giurgiu";
pub const HIRSOVA: &str = "Hirsova";
pub const IASI: &str = "Iasi";
pub const LUGOJ: &str = "Lugoj";
pub const MEHADIA: &str = "Mehadia";
pub const NEAMT: &str = "Neamt";
pub const ORADEA: &str = "Oradea";
pub const PITESTI: &str = "Pitesti";
pub const RIMNICU_VILCEA: &str = "RimnicuVilcea";
pub const SIBIU: &str = "Sibiu";
pub const TIMISOARA: &str = "Timisoara";
pub const URZICENI: &str = "Urziceni";
pub const VASLUI: &str = "Vaslui";
pub const ZERIND: &str = "Zerind";

/// Build a fresh copy of the map. Each copy is independently mutable, which
/// suits scenarios that block roads or add detours.
pub fn map() -> RoadMap {
    let mut m = RoadMap::new();

    // Straight-line distance and compass bearing to Bucharest, at the origin.
    m.set_position_polar(ARAD, 366.0, 117.0);
    m.set_position_polar(BUCHAREST, 0.0, 360.0);
    m.set_position_polar(CRAIOVA, 160.0, 74.0);
    m.set_position_polar(DOBRETA, 242.0, 82.0);
    m.set_position_polar(EFORIE, 161.0, 282.0);
    m.set_position_polar(FAGARAS, 176.0, 142.0);
    m.set_position_polar(GIURGIU, 77.0, 25.0);
    m.set_position_polar(HIRSOVA, 151.0, 260.0);
    m.set_position_polar(IASI, 226.0, 211.0);
    m.set_position_polar(LUGOJ, 244.0, 101.0);
    m.set_position_polar(MEHADIA, 241.0, 92.0);
    m.set_position_polar(NEAMT, 234.0, 181.0);
    m.set_position_polar(ORADEA, 380.0, 131.0);
    m.set_position_polar(PITESTI, 100.0, 116.0);
    m.set_position_polar(RIMNICU_VILCEA, 193.0, 115.0);
    m.set_position_polar(SIBIU, 253.0, 123.0);
    m.set_position_polar(TIMISOARA, 329.0, 105.0);
    m.set_position_polar(URZICENI, 80.0, 247.0);
    m.set_position_polar(VASLUI, 199.0, 222.0);
    m.set_position_polar(ZERIND, 374.0, 125.0);

    // Roads, with the traditional driving distances.
    m.add_two_way(ARAD, ZERIND, 75.0);
    m.add_two_way(ARAD, TIMISOARA, 118.0);
    m.add_two_way(ARAD, SIBIU, 140.0);
    m.add_two_way(BUCHAREST, FAGARAS, 211.0);
    m.add_two_way(BUCHAREST, PITESTI, 101.0);
    m.add_two_way(BUCHAREST, GIURGIU, 90.0);
    m.add_two_way(BUCHAREST, URZICENI, 85.0);
    m.add_two_way(CRAIOVA, DOBRETA, 120.0);
    m.add_two_way(CRAIOVA, RIMNICU_VILCEA, 146.0);
    m.add_two_way(CRAIOVA, PITESTI, 138.0);
    m.add_two_way(DOBRETA, MEHADIA, 75.0);
    m.add_two_way(EFORIE, HIRSOVA, 86.0);
    m.add_two_way(FAGARAS, SIBIU, 99.0);
    m.add_two_way(HIRSOVA, URZICENI, 98.0);
    m.add_two_way(IASI, NEAMT, 87.0);
    m.add_two_way(IASI, VASLUI, 92.0);
    m.add_two_way(LUGOJ, TIMISOARA, 111.0);
    m.add_two_way(LUGOJ, MEHADIA, 70.0);
    m.add_two_way(ORADEA, ZERIND, 71.0);
    m.add_two_way(ORADEA, SIBIU, 151.0);
    m.add_two_way(PITESTI, RIMNICU_VILCEA, 97.0);
    m.add_two_way(RIMNICU_VILCEA, SIBIU, 80.0);
    m.add_two_way(URZICENI, VASLUI, 142.0);

    m
}

/// The process-wide shared copy, built on first access. It hands out only
/// shared references, so concurrent searches can borrow it freely.
pub fn shared() -> &'static RoadMap {
    static MAP: LazyLock<RoadMap> = LazyLock::new(map);
    &MAP
}
