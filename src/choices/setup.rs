use crate::choice;
use crate::choices::Description;
use crate::plotter::Model;
use crate::utils::geometry::Paper;
use tracing::warn;

choice!(PaperChoice,
    FullBed => "Full bed - 50.0 × 35.3 cm (AxiDraw SE/A1)",
    A3 => "A3 - 42.0 × 29.7 cm",
    A4 => "A4 - 29.7 × 21.0 cm",
    Custom => "Custom - enter width and height in cm"
);

choice!(ModelChoice,
    V3 => "AxiDraw V2, V3, or SE/A4",
    V3A3 => "AxiDraw V3/A3 or SE/A3",
    V3Xlx => "AxiDraw V3 XLX",
    MiniKit => "AxiDraw MiniKit",
    SeA1 => "AxiDraw SE/A1",
    SeA2 => "AxiDraw SE/A2"
);

pub fn get_paper(paper_choice: PaperChoice) -> Paper {
    match paper_choice {
        PaperChoice::FullBed => Paper::FULL_BED,
        PaperChoice::A3 => Paper::A3,
        PaperChoice::A4 => Paper::A4,
        PaperChoice::Custom => {
            let width_cm = inquire::prompt_f64("Paper width in cm")
                .expect("Failed to get user input");
            let height_cm = inquire::prompt_f64("Paper height in cm")
                .expect("Failed to get user input");

            Paper::new(sane_extent(width_cm), sane_extent(height_cm))
        }
    }
}

pub fn get_model(model_choice: ModelChoice) -> Model {
    match model_choice {
        ModelChoice::V3 => Model::V3,
        ModelChoice::V3A3 => Model::V3A3,
        ModelChoice::V3Xlx => Model::V3Xlx,
        ModelChoice::MiniKit => Model::MiniKit,
        ModelChoice::SeA1 => Model::SeA1,
        ModelChoice::SeA2 => Model::SeA2,
    }
}

// Keep the physical canvas at least a centimeter in each direction.
fn sane_extent(extent_cm: f64) -> f64 {
    if extent_cm < 1.0 {
        warn!("paper extent {extent_cm} cm is too small, using 1.0 cm");
        1.0
    } else {
        extent_cm
    }
}
