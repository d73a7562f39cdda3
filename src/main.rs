// Docopt
#[macro_use]
extern crate serde_derive;
use docopt::Docopt;

// General dependencies
use log::info;
use std::process;

use alsa_volume::{device_exists, element_exists, AlsaBackend, Channel, Mixer, MixerParams};

const USAGE: &'static str = "
Usage:
    volctl [options] get
    volctl [options] set <percent>
    volctl [options] inc <percent>
    volctl [options] dec <percent>
    volctl [options] mute
    volctl [options] exists
    volctl (-h | --help)

Options:
    -D DEVICE     Mixer device [default: default]
    -e ELEMENT    Simple mixer element [default: Master]
    -c CHANNEL    Channel to read, e.g. mono or front-right [default: mono]
    -m            Follow the element's decibel scale
    -d LEVEL      Debug level (0 = silent, 5 = trace) [default: 2]
    -h, --help    Print this help and exit
";

#[derive(Deserialize)]
struct Args {
    arg_percent: Option<f32>,
    cmd_get: bool,
    cmd_set: bool,
    cmd_inc: bool,
    cmd_dec: bool,
    cmd_mute: bool,
    cmd_exists: bool,
    #[serde(rename = "flag_D")]
    flag_device: String,
    flag_e: String,
    flag_c: String,
    flag_m: bool,
    flag_d: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    stderrlog::new().verbosity(args.flag_d).color(stderrlog::ColorChoice::Never).init()?;

    let mut params = MixerParams::new();
    params.set_device(args.flag_device);
    params.set_element(args.flag_e);
    params.set_channel(args.flag_c.parse::<Channel>()?);

    let backend = AlsaBackend;

    if args.cmd_exists {
        if !device_exists(&backend, params.device()) {
            println!("device {} not found", params.device());
            process::exit(1);
        }

        if !element_exists(&backend, params.device(), params.element()) {
            println!("element {} not found on {}", params.element(), params.device());
            process::exit(1);
        }

        println!("{} on {}", params.element(), params.device());
        return Ok(());
    }

    let mut mixer = Mixer::open(&backend, &params)?;
    let delta = args.arg_percent.unwrap_or(0.0) / 100.0;
    let mapped = args.flag_m;

    let volume = if args.cmd_set {
        mixer.set_vol_pct(delta, mapped)
    } else if args.cmd_inc {
        mixer.inc_vol_pct(delta, mapped, params.channel())
    } else if args.cmd_dec {
        mixer.dec_vol_pct(delta, mapped, params.channel())
    } else if args.cmd_mute {
        let volume = mixer.mute();
        if let Some(raw) = mixer.saved_volume() {
            info!("muted {}, raw volume was {}", params.element(), raw);
        }
        volume
    } else {
        debug_assert!(args.cmd_get);
        mixer.get_cur_vol_pct(mapped, params.channel())
    };

    println!("{}%", (volume * 100.0).round());

    Ok(())
}
