use scripts::niobium;

mod scripts;
mod submodules;

fn main() {
    let results = niobium::run();
    results.plot("niobiy_prop.png").unwrap();
}
