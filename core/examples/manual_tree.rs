use treedot::config::DotOptions;
use treedot::emit::to_terminal;
use treedot::{to_dot, NodeData, ParseTree};

fn main() {
    // Build a parse tree for "the cat sat" by hand
    let mut tree = ParseTree::new();

    let s = tree.add_node(None, NodeData::branch("S"));

    let np = tree.add_node(Some(s), NodeData::branch("NP"));
    tree.add_node(Some(np), NodeData::leaf("DET").with_text("the"));
    tree.add_node(Some(np), NodeData::leaf("N").with_text("cat"));

    let vp = tree.add_node(Some(s), NodeData::branch("VP"));
    tree.add_node(Some(vp), NodeData::leaf("V").with_text("sat"));

    let options = DotOptions {
        indent: true,
        highlight_root: true,
        ..Default::default()
    };

    match to_dot(&tree, &options) {
        Ok(dot) => {
            println!("Generated graph:");
            print!("{dot}");
        }
        Err(e) => eprintln!("Error: {e}"),
    }

    match to_terminal(&tree) {
        Ok(text) => print!("{text}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
