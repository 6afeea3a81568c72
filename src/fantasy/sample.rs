//! Built-in sample season used when no stats file is supplied.
//!
//! 50 players: 10 QBs, 15 RBs, 15 WRs, 10 TEs.

use super::types::PlayerStatRecord;

const NAMES: [&str; 50] = [
    "Patrick Mahomes", "Josh Allen", "Lamar Jackson", "Jalen Hurts", "Dak Prescott",
    "Joe Burrow", "Justin Herbert", "Trevor Lawrence", "Tua Tagovailoa", "Brock Purdy",
    "Christian McCaffrey", "Derrick Henry", "Saquon Barkley", "Josh Jacobs", "Austin Ekeler",
    "Alvin Kamara", "Tony Pollard", "Rhamondre Stevenson", "Travis Etienne", "Breece Hall",
    "Joe Mixon", "Aaron Jones", "James Cook", "Isiah Pacheco", "Kenneth Walker",
    "Tyreek Hill", "CeeDee Lamb", "Amon-Ra St. Brown", "Mike Evans", "Stefon Diggs",
    "Keenan Allen", "Davante Adams", "A.J. Brown", "Deebo Samuel", "Jaylen Waddle",
    "Terry McLaurin", "DK Metcalf", "Calvin Ridley", "DeAndre Hopkins", "Cooper Kupp",
    "Travis Kelce", "Mark Andrews", "T.J. Hockenson", "George Kittle", "Sam LaPorta",
    "Evan Engram", "David Njoku", "Kyle Pitts", "Dalton Schultz", "Trey McBride",
];

const TEAMS: [&str; 50] = [
    "KC", "BUF", "BAL", "PHI", "DAL", "CIN", "LAC", "JAX", "MIA", "SF",
    "SF", "TEN", "NYG", "GB", "LAC", "NO", "DAL", "NE", "JAX", "NYJ",
    "CIN", "GB", "BUF", "KC", "SEA", "MIA", "DAL", "DET", "TB", "BUF",
    "LAC", "LV", "PHI", "SF", "MIA", "WAS", "SEA", "TEN", "TEN", "LAR",
    "KC", "BAL", "MIN", "SF", "DET", "JAX", "CLE", "ATL", "HOU", "ARI",
];

const GAMES: [u32; 50] = [
    17, 17, 16, 17, 17, 10, 13, 16, 16, 16,
    16, 17, 14, 13, 14, 13, 17, 12, 17, 17,
    17, 11, 17, 16, 15, 16, 17, 16, 17, 17,
    13, 17, 16, 15, 12, 17, 16, 17, 17, 12,
    15, 10, 15, 16, 17, 17, 16, 17, 15, 17,
];

// Quarterbacks only.
const PASSING_YDS: [f64; 10] = [4183.0, 4306.0, 3218.0, 3858.0, 4516.0, 2309.0, 3104.0, 4006.0, 4624.0, 4280.0];
const PASSING_TD: [f64; 10] = [27.0, 29.0, 24.0, 23.0, 36.0, 15.0, 20.0, 21.0, 29.0, 31.0];
const PASSING_SKS: [f64; 10] = [27.0, 24.0, 29.0, 38.0, 30.0, 22.0, 29.0, 35.0, 31.0, 28.0];

// Quarterbacks and running backs.
const RUSHING_YDS: [f64; 25] = [
    389.0, 524.0, 821.0, 605.0, 242.0, 88.0, 228.0, 339.0, 74.0, 144.0,
    1014.0, 1167.0, 962.0, 805.0, 628.0, 694.0, 1006.0, 619.0, 1120.0, 994.0,
    1034.0, 656.0, 1122.0, 935.0, 905.0,
];
const RUSHING_TD: [f64; 25] = [
    4.0, 15.0, 5.0, 15.0, 2.0, 4.0, 4.0, 4.0, 1.0, 2.0,
    14.0, 12.0, 6.0, 6.0, 5.0, 5.0, 6.0, 4.0, 11.0, 5.0,
    9.0, 2.0, 16.0, 7.0, 8.0,
];

// Everyone except quarterbacks.
const RECEIVING_TGT: [f64; 40] = [
    83.0, 33.0, 60.0, 44.0, 74.0, 75.0, 55.0, 69.0, 58.0, 76.0,
    64.0, 30.0, 48.0, 57.0, 27.0, 171.0, 181.0, 164.0, 136.0, 107.0,
    150.0, 175.0, 158.0, 97.0, 95.0, 130.0, 119.0, 136.0, 75.0, 95.0,
    93.0, 61.0, 95.0, 65.0, 120.0, 114.0, 89.0, 90.0, 88.0, 81.0,
];
const RECEIVING_YDS: [f64; 40] = [
    564.0, 214.0, 280.0, 296.0, 436.0, 466.0, 311.0, 238.0, 476.0, 591.0,
    376.0, 233.0, 280.0, 345.0, 259.0, 1799.0, 1749.0, 1515.0, 1255.0, 1075.0,
    1243.0, 1144.0, 1456.0, 1057.0, 737.0, 1051.0, 1122.0, 1016.0, 1057.0, 737.0,
    984.0, 544.0, 960.0, 1020.0, 889.0, 1144.0, 882.0, 667.0, 635.0, 825.0,
];
const RECEIVING_TD: [f64; 40] = [
    7.0, 0.0, 4.0, 1.0, 1.0, 5.0, 0.0, 4.0, 1.0, 4.0,
    4.0, 1.0, 0.0, 5.0, 1.0, 13.0, 12.0, 10.0, 13.0, 8.0,
    7.0, 8.0, 7.0, 5.0, 5.0, 4.0, 8.0, 8.0, 7.0, 5.0,
    5.0, 6.0, 5.0, 6.0, 10.0, 4.0, 3.0, 3.0, 5.0, 3.0,
];

const FUM_LOST: [f64; 50] = [
    3.0, 4.0, 6.0, 3.0, 2.0, 2.0, 3.0, 4.0, 2.0, 1.0,
    1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 1.0,
    1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

fn position_for(idx: usize) -> &'static str {
    match idx {
        0..=9 => "QB",
        10..=24 => "RB",
        25..=39 => "WR",
        _ => "TE",
    }
}

/// The sample season as raw stat records, in roster order.
pub fn sample_players() -> Vec<PlayerStatRecord> {
    (0..NAMES.len())
        .map(|i| PlayerStatRecord {
            name: NAMES[i].to_string(),
            team: TEAMS[i].to_string(),
            position: position_for(i).to_string(),
            games_played: GAMES[i],
            passing_yds: PASSING_YDS.get(i).copied().unwrap_or(0.0),
            passing_td: PASSING_TD.get(i).copied().unwrap_or(0.0),
            passing_sacks: PASSING_SKS.get(i).copied().unwrap_or(0.0),
            rushing_yds: RUSHING_YDS.get(i).copied().unwrap_or(0.0),
            rushing_td: RUSHING_TD.get(i).copied().unwrap_or(0.0),
            receiving_tgt: i.checked_sub(10).map_or(0.0, |j| RECEIVING_TGT[j]),
            receiving_yds: i.checked_sub(10).map_or(0.0, |j| RECEIVING_YDS[j]),
            receiving_td: i.checked_sub(10).map_or(0.0, |j| RECEIVING_TD[j]),
            returns_td: 0.0,
            fumbles_lost: FUM_LOST[i],
        })
        .collect()
}
