mod common;

use crate::common::{init_logging, STOP_INIT_CODE};
use alloy::providers::Provider;
use evm_deployer::common::Salt;
use evm_deployer::factory::{FACTORY_ADDRESS, FACTORY_RUNTIME_CODE};
use evm_deployer::testnet::{
    anvil_client, start_node, start_node_without_factory, start_node_without_mining,
};
use evm_deployer::{derive_address, ChainReader, Deployer, Error, GasLimit, Signer};
use std::time::Duration;

#[tokio::test]
async fn test_deploy_through_predeployed_factory() {
    init_logging();

    let (anvil, rpc_url) = start_node();
    let client = anvil_client(&rpc_url, &anvil, 0);
    let mut deployer = Deployer::new(client.clone(), client.clone());

    let address = deployer
        .deploy(STOP_INIT_CODE, Salt::from(1), GasLimit::Manual)
        .await
        .expect("deployment");

    assert_eq!(deployer.factory().address, FACTORY_ADDRESS);
    assert_eq!(address, derive_address(FACTORY_ADDRESS, Salt::from(1), &STOP_INIT_CODE));
    assert_eq!(client.code_at(address).await.expect("code").as_ref(), &[0x00]);

    let nonce = client
        .provider()
        .get_transaction_count(client.address())
        .await
        .expect("nonce");

    let again = deployer
        .deploy(STOP_INIT_CODE, Salt::from(1), GasLimit::Estimate)
        .await
        .expect("second deployment");
    assert_eq!(again, address);

    let nonce_after = client
        .provider()
        .get_transaction_count(client.address())
        .await
        .expect("nonce");
    assert_eq!(nonce, nonce_after);
}

#[tokio::test]
async fn test_bootstrap_factory_from_regular_account() {
    init_logging();

    let (anvil, rpc_url) = start_node_without_factory();
    let client = anvil_client(&rpc_url, &anvil, 0);
    let mut deployer = Deployer::new(client.clone(), client.clone());

    assert!(client.code_at(FACTORY_ADDRESS).await.expect("code").is_empty());

    deployer.ensure_factory_deployed().await.expect("factory");

    let factory = client.address().create(0);
    assert_eq!(deployer.factory().address, factory);
    assert_eq!(
        client.code_at(factory).await.expect("code").as_ref(),
        FACTORY_RUNTIME_CODE
    );

    let address = deployer
        .deploy(STOP_INIT_CODE, Salt::ZERO, GasLimit::Manual)
        .await
        .expect("deployment");
    assert_eq!(address, derive_address(factory, Salt::ZERO, &STOP_INIT_CODE));
}

#[tokio::test]
async fn test_confirmation_timeout_on_unmined_deployment() {
    init_logging();

    let (anvil, rpc_url) = start_node_without_mining();
    let client =
        anvil_client(&rpc_url, &anvil, 0).with_confirmation_timeout(Some(Duration::from_secs(1)));
    let mut deployer = Deployer::new(client.clone(), client.clone());

    let result = deployer.deploy(STOP_INIT_CODE, Salt::ZERO, GasLimit::Manual).await;

    assert!(matches!(result, Err(Error::Timeout(_))), "{result:?}");
    let address = derive_address(FACTORY_ADDRESS, Salt::ZERO, &STOP_INIT_CODE);
    assert!(client.code_at(address).await.expect("code").is_empty());
}
