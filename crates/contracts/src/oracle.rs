//! Base-fee oracle interface definitions.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IBaseFeeOracle {
        function governance() external view returns (address);
        function setBaseFeeProvider(address provider) external;
        function setManualBaseFeeBool(bool manualBaseFeeBool) external;
    }
}
