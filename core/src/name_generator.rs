//! Deterministic personnel name and street address generation using
//! curated en-US lists.
//!
//! All generation is deterministic (same RNG seed = same output).

use crate::rng::ColumnRng;

/// Deterministic generator for dispatcher and call-taker names
pub struct NameGenerator;

impl NameGenerator {
    /// Staff name in roster form: "Last, First"
    pub fn staff_name(rng: &mut ColumnRng) -> String {
        let first = Self::first_name(rng);
        let last = Self::last_name(rng);
        format!("{last}, {first}")
    }

    pub fn first_name(rng: &mut ColumnRng) -> &'static str {
        *rng.pick(FIRST_NAMES)
    }

    pub fn last_name(rng: &mut ColumnRng) -> &'static str {
        *rng.pick(LAST_NAMES)
    }
}

/// Deterministic street address generator.
///
/// Shapes: "4821 Hudson Ridge" or "771 Carla Crossing Apt. 412".
pub struct AddressGenerator;

impl AddressGenerator {
    pub fn street_address(rng: &mut ColumnRng) -> String {
        let number = Self::building_number(rng);
        let street = Self::street_name(rng);
        if rng.chance(0.25) {
            let unit = Self::secondary_unit(rng);
            format!("{number} {street} {unit}")
        } else {
            format!("{number} {street}")
        }
    }

    fn building_number(rng: &mut ColumnRng) -> u64 {
        // 3, 4 or 5 digits
        match rng.next_u64_below(3) {
            0 => 100 + rng.next_u64_below(900),
            1 => 1_000 + rng.next_u64_below(9_000),
            _ => 10_000 + rng.next_u64_below(90_000),
        }
    }

    fn street_name(rng: &mut ColumnRng) -> String {
        let root = if rng.chance(0.5) {
            NameGenerator::last_name(rng)
        } else {
            NameGenerator::first_name(rng)
        };
        let suffix = rng.pick(STREET_SUFFIXES);
        format!("{root} {suffix}")
    }

    fn secondary_unit(rng: &mut ColumnRng) -> String {
        let unit = 100 + rng.next_u64_below(900);
        if rng.chance(0.5) {
            format!("Apt. {unit}")
        } else {
            format!("Suite {unit}")
        }
    }
}

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adrian", "Alicia", "Allison", "Alyssa", "Andre", "Angela",
    "Antonio", "Autumn", "Bailey", "Bianca", "Blake", "Brandi", "Brent", "Bridget",
    "Caleb", "Cameron", "Candace", "Carlos", "Carmen", "Casey", "Cedric", "Chelsea",
    "Clayton", "Colleen", "Connor", "Corey", "Crystal", "Curtis", "Dakota", "Dana",
    "Darius", "Darlene", "Dawn", "Derek", "Desiree", "Devin", "Dominic", "Donovan",
    "Dustin", "Elaine", "Erica", "Erin", "Felicia", "Franklin", "Gavin", "Gina",
    "Grant", "Gretchen", "Hector", "Holly", "Hunter", "Imani", "Ivan", "Jamal",
    "Janelle", "Jared", "Jasmine", "Javier", "Jillian", "Joel", "Kara", "Katrina",
    "Keisha", "Kendra", "Kristen", "Lance", "Latoya", "Leah", "Leon", "Lindsey",
    "Lucas", "Malik", "Marcus", "Marisol", "Mckenzie", "Miguel", "Monique", "Morgan",
    "Natasha", "Neil", "Omar", "Paige", "Preston", "Quentin", "Raquel", "Reginald",
    "Renee", "Ricardo", "Rochelle", "Rodney", "Sabrina", "Shane", "Shawna", "Sierra",
    "Spencer", "Tamara", "Tanya", "Terrence", "Tiffany", "Tonya", "Travis", "Trevor",
    "Valerie", "Vanessa", "Wesley", "Whitney", "Xavier", "Yolanda", "Zachary", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Acosta", "Atkinson", "Ayala", "Barker", "Barrera", "Beck", "Benson",
    "Blackwell", "Bowen", "Brady", "Buchanan", "Burke", "Calderon", "Cannon", "Cardenas",
    "Carr", "Chambers", "Christensen", "Conner", "Conway", "Crosby", "Dalton", "Davenport",
    "Dawson", "Delgado", "Donovan", "Duffy", "Duran", "Erickson", "Estrada", "Farmer",
    "Figueroa", "Fleming", "Fowler", "Frazier", "Fuentes", "Gallagher", "Gillespie", "Glover",
    "Goodwin", "Hale", "Hammond", "Hardy", "Harmon", "Hensley", "Hobbs", "Holloway",
    "Hopkins", "Horton", "Huffman", "Ingram", "Jennings", "Kaufman", "Keller", "Kirby",
    "Lambert", "Larsen", "Lawson", "Leach", "Lindsey", "Lowe", "Lynch", "Maddox",
    "Maldonado", "Mathis", "McCarthy", "McKinney", "Mercado", "Molina", "Montgomery", "Nash",
    "Navarro", "Norris", "Oconnor", "Osborne", "Pacheco", "Padilla", "Page", "Pearson",
    "Pittman", "Quinn", "Randall", "Rasmussen", "Rowe", "Salinas", "Santiago", "Saunders",
    "Schneider", "Sexton", "Shepherd", "Sloan", "Solomon", "Stafford", "Strickland", "Sutton",
    "Tate", "Todd", "Underwood", "Valencia", "Vaughn", "Villarreal", "Wade", "Walton",
    "Whitaker", "Wilkerson", "Wolfe", "Yates", "York", "Zamora", "Zimmerman", "Zuniga",
];

const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Bypass", "Camp", "Circle", "Club", "Court", "Cove", "Creek",
    "Crossing", "Drive", "Estates", "Expressway", "Falls", "Fields", "Forge", "Gardens",
    "Glen", "Grove", "Harbor", "Heights", "Hills", "Hollow", "Island", "Junction",
    "Knoll", "Lake", "Landing", "Lane", "Light", "Loop", "Manor", "Meadow",
    "Mill", "Mission", "Mount", "Orchard", "Overpass", "Park", "Parkway", "Pass",
    "Path", "Pike", "Pine", "Place", "Plaza", "Point", "Port", "Prairie",
    "Ranch", "Rapids", "Ridge", "Road", "Route", "Row", "Run", "Shoals",
    "Springs", "Square", "Station", "Stream", "Street", "Summit", "Terrace", "Trace",
    "Trail", "Tunnel", "Turnpike", "Union", "Valley", "View", "Villages", "Way",
];
