use txmodal_adapters::{ExplorerAdapter, ModalConfig, WatchAssetAdapter};
use txmodal_core::{
    ConfirmationModal, Currency, DismissHandle, DisplayState, ModalContent, ModalProps, Token,
    ViewAction, ViewNode, WatchAssetPort,
};

fn modal(config: &ModalConfig) -> ConfirmationModal<ExplorerAdapter, WatchAssetAdapter> {
    config.configure(ConfirmationModal::new(
        ExplorerAdapter::with_config(config),
        WatchAssetAdapter::default(),
    ))
}

fn sushi() -> Currency {
    Currency::Token(Token {
        chain_id: 1,
        address: "0x6B3595068778DD592e39A122f4f5a5cF09C90fE2"
            .parse()
            .expect("valid sushi address"),
        symbol: "SUSHI".to_owned(),
        decimals: 18,
        logo_uri: None,
    })
}

#[test]
fn submitted_mainnet_links_to_etherscan() {
    let modal = modal(&ModalConfig::default());
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached())
            .hash(Some("0xabc"))
            .chain_id(Some(1)),
        || ModalContent::Custom(ViewNode::Custom("unused".to_owned())),
    );
    assert_eq!(frame.state, DisplayState::Submitted);
    assert_eq!(frame.body.links(), vec!["https://etherscan.io/tx/0xabc"]);
}

#[test]
fn unsupported_chain_renders_without_link() {
    let modal = modal(&ModalConfig::default());
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached())
            .hash(Some("0xabc"))
            .chain_id(Some(31337)),
        || ModalContent::Custom(ViewNode::Custom("unused".to_owned())),
    );
    assert_eq!(frame.state, DisplayState::Submitted);
    assert!(frame.body.links().is_empty());
}

#[test]
fn config_controls_fallback_text_and_height() {
    let config = ModalConfig::from_json_str(
        r#"{"max_height_percent": 75, "pending_fallback_text": "Preparing swap"}"#,
    )
    .expect("valid config");
    let modal = modal(&config);
    let frame = modal.render(
        ModalProps::new(true, DismissHandle::detached()).attempting(true),
        || ModalContent::error("unused"),
    );
    assert_eq!(frame.max_height_percent, 75.0);
    assert!(frame.body.texts().contains(&"Preparing swap"));
}

#[test]
fn add_token_action_flips_affordance_on_next_render() {
    let modal = modal(&ModalConfig::default());
    let token = sushi();
    let render = || {
        modal.render(
            ModalProps::new(true, DismissHandle::detached())
                .hash(Some("0xabc"))
                .chain_id(Some(1))
                .currency_to_add(Some(&token)),
            || ModalContent::error("unused"),
        )
    };

    let frame = render();
    let action = frame
        .dispatch(ViewAction::AddToken)
        .expect("add token is handled by the host");
    assert_eq!(action, ViewAction::AddToken);
    let watched = token.as_token().expect("erc20");
    modal.watch_asset.add_token(watched).expect("request accepted");
    modal.watch_asset.add_token(watched).expect("repeat is a no-op");
    assert!(modal.watch_asset.success(watched));

    let frame = render();
    assert!(frame.body.texts().contains(&"Added SUSHI"));
}
