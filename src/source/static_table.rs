//! Built-in plant table
//!
//! Mostly current-shape entries (season lists, latin names). Entry 8 keeps the
//! legacy single-season shape with no latin name or description, as the first
//! data sets had it.

use async_trait::async_trait;

use super::RecordSource;
use crate::error::SourceError;
use crate::record::PlantRecord;

pub struct StaticSource {
    records: Vec<PlantRecord>,
}

impl StaticSource {
    /// Source over the built-in table
    pub fn builtin() -> Self {
        Self { records: builtin_plants() }
    }

    /// Source over caller-supplied records
    pub fn from_records(records: Vec<PlantRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn name(&self) -> &str {
        "static table"
    }

    async fn try_fetch(&self) -> Result<Vec<PlantRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

pub fn builtin_plants() -> Vec<PlantRecord> {
    vec![
        PlantRecord::new(1, "Wild Garlic", "/wild-garlic.jpg", ["Spring"], "Forest")
            .with_latin_name("Allium ursinum")
            .with_description("Broad leaves smelling of garlic, carpeting damp woodland floors."),
        PlantRecord::new(2, "Stinging Nettle", "/nettle.jpg", ["Spring", "Summer"], "Grassland")
            .with_latin_name("Urtica dioica")
            .with_description("Pick the young top leaves; cooking removes the sting."),
        PlantRecord::new(3, "Elderflower", "/elderflower.jpg", ["Summer"], "Riverside")
            .with_latin_name("Sambucus nigra")
            .with_description("Creamy flat-topped flower heads used for cordial."),
        PlantRecord::new(4, "Blackberry", "/blackberry.jpg", ["Summer", "Autumn"], "Grassland")
            .with_latin_name("Rubus fruticosus")
            .with_description("Bramble fruit ripening from late summer in hedges and scrub."),
        PlantRecord::new(5, "Chanterelle", "/chanterelle.jpg", ["Summer", "Autumn"], "Forest")
            .with_latin_name("Cantharellus cibarius")
            .with_description("Golden funnel-shaped mushroom with false gills; check identification carefully."),
        PlantRecord::new(6, "Watercress", "/watercress.jpg", ["Spring", "Autumn", "Winter"], "Riverside")
            .with_latin_name("Nasturtium officinale")
            .with_description("Peppery leaves in clean running water; cook if the water source is unknown."),
        PlantRecord::new(7, "Rosehip", "/rosehip.jpg", ["Autumn", "Winter"], "Grassland")
            .with_latin_name("Rosa canina")
            .with_description("Red hips of the dog rose, rich in vitamin C; remove the hairy seeds."),
        PlantRecord::new(8, "Dandelion", "dandelion.jpg", "Spring", "Grassland"),
        PlantRecord::new(9, "Hazelnut", "/hazelnut.jpg", ["Autumn"], "Forest")
            .with_latin_name("Corylus avellana")
            .with_description("Nuts ripen in early autumn; squirrels usually get there first."),
        PlantRecord::new(10, "Meadowsweet", "/meadowsweet.jpg", ["Summer"], "Riverside")
            .with_latin_name("Filipendula ulmaria")
            .with_description("Frothy, almond-scented flowers along wet ditches and riverbanks."),
        PlantRecord::new(11, "Velvet Shank", "/velvet-shank.jpg", ["Winter"], "Forest")
            .with_latin_name("Flammulina velutipes")
            .with_description("Orange caps on dead wood that fruit through frosts."),
    ]
}
