//! Operator capture of a new commodity.
//!
//! Prompts for the common fields first, then the variant fields in the
//! order operators are used to, then the description.

use std::io::{BufRead, Write};

use emporium_core::{AudioSpec, Commodity, LaptopSpec, Money, SmartphoneSpec, Variant};

use crate::error::AppResult;
use crate::prompt::Prompter;

/// Asks which variant to add. `None` means the operator backed out.
pub fn choose_variant<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> AppResult<Option<Variant>> {
    prompter.say("Which type of commodity you want to add?")?;
    prompter.say("1. Audio, 2. Smartphone, 3. Laptop")?;
    prompter.say("Or type 0 to regret")?;

    let choice = prompter.menu_choice(Variant::ALL.len(), true)?;
    Ok(choice.checked_sub(1).and_then(Variant::from_index))
}

/// Prompts for every field of a `variant` commodity.
pub fn capture_commodity<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    variant: Variant,
) -> AppResult<Commodity> {
    prompter.say("Please input the commodity name:")?;
    let name = prompter.name()?;
    prompter.say("Please input the commodity price:")?;
    let price = Money::from(prompter.positive_number("price")?);

    let commodity = match variant {
        Variant::Audio => {
            let low_freq_hz = number(
                prompter,
                "Please input the lowest frequency response (Hz)",
                "lowest frequency",
            )?;
            let high_freq_khz = number(
                prompter,
                "Please input the highest frequency response (kHz)",
                "highest frequency",
            )?;
            let sensitivity_db =
                number(prompter, "Please input the sensitivity (dB)", "sensitivity")?;
            let impedance_ohm = number(prompter, "Please input the impedance (Ohm)", "impedance")?;
            let description = description(prompter)?;
            Commodity::audio(
                name,
                price,
                description,
                AudioSpec {
                    low_freq_hz,
                    high_freq_khz,
                    sensitivity_db,
                    impedance_ohm,
                },
            )
        }
        Variant::Smartphone => {
            let screen_inch = number(prompter, "Please input the screen size (inch)", "screen size")?;
            let cellular = text(prompter, "Please input the cellular and wireless capabilities")?;
            let camera_px = number(prompter, "Please input the camera resolution (pixel)", "camera")?;
            let chip = text(prompter, "Please input the chip")?;
            let weight_g = number(prompter, "Please input the weight (grams)", "weight")?;
            let video_playback_hours =
                number(prompter, "Please input the video playback time (hours)", "video playback")?;
            let description = description(prompter)?;
            Commodity::smartphone(
                name,
                price,
                description,
                SmartphoneSpec {
                    screen_inch,
                    cellular,
                    camera_px,
                    chip,
                    weight_g,
                    video_playback_hours,
                },
            )
        }
        Variant::Laptop => {
            let os = text(prompter, "Please input the operating system")?;
            let screen_inch = number(prompter, "Please input the screen size (inch)", "screen size")?;
            let cpu = text(prompter, "Please input the CPU")?;
            let max_memory_gb = number(prompter, "Please input the max memory size (GB)", "memory size")?;
            let disk_gb = number(prompter, "Please input the disk size (GB)", "disk size")?;
            let gpu = text(prompter, "Please input the GPU")?;
            prompter.say("Does this laptop have RGB light? 1. yes, 2. no")?;
            let has_rgb = prompter.menu_choice(2, false)? == 1;
            let description = description(prompter)?;
            Commodity::laptop(
                name,
                price,
                description,
                LaptopSpec {
                    screen_inch,
                    os,
                    cpu,
                    gpu,
                    max_memory_gb,
                    disk_gb,
                    has_rgb,
                },
            )
        }
    };

    Ok(commodity)
}

fn number<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    question: &str,
    field: &str,
) -> AppResult<u32> {
    prompter.say(question)?;
    prompter.positive_number(field)
}

fn text<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, question: &str) -> AppResult<String> {
    prompter.say(question)?;
    prompter.text()
}

fn description<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> AppResult<String> {
    text(prompter, "Please input the detail of the commodity:")
}
