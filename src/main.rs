//! Demonstration run: build the mansion, catalogue the clues, link the
//! evidence and name the suspects.

use mansion_case::narrative::{suspect_or_nobody, EvidenceRecorded};
use mansion_case::{Case, CaseConfig, CaseError, Clue, Room};

fn main() -> Result<(), CaseError> {
    let mut case = Case::new(CaseConfig::default())?;

    println!("--- DETECTIVE QUEST: starting simulation ---\n");

    println!("1. Building the mansion map...");
    let mut hall = Room::new("Main Hall")?;
    hall.set_left(Room::new("Library")?.with_left(Room::new("Office")?));
    hall.set_right(Room::new("Dining Room")?.with_left(Room::new("Kitchen")?));
    case.set_map(hall);
    if let Some(map) = case.map() {
        print!("{}", map.display());
    }

    println!("\n2. Cataloguing clues (search tree)...");
    case.catalog(Clue::new(202, "Kitchen Knife", "Murder Weapon")?)?;
    case.catalog(Clue::new(101, "Muddy Footprint", "Outside Evidence")?)?;
    case.catalog(Clue::new(305, "Threatening Letter", "Motive")?)?;
    case.catalog(Clue::new(201, "Coat Button", "Physical Evidence")?)?;
    print!("{}", case.clues().display());

    println!("\n3. Linking evidence to suspects (hash table)...");
    for (clue_id, suspect) in [
        (202, "Butler"),
        (101, "Gardener"),
        (305, "Nephew"),
        (201, "Butler"),
    ] {
        case.link(clue_id, suspect)?;
        println!("{}", EvidenceRecorded { clue_id, suspect });
    }

    println!("\n4. SOLVING THE MYSTERY:");
    for clue_id in [202, 201, 101] {
        let description = case
            .clues()
            .get(clue_id)
            .map_or("unknown clue", Clue::description);
        println!("\n   Who is linked to '{description}' (clue ID {clue_id})?");
        println!(
            "   >>> The suspect is: {}!",
            suspect_or_nobody(case.suspect_for(clue_id))
        );
    }

    println!("\n--- Simulation complete ---");
    Ok(())
}
